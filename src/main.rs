use clap::Parser;
use httpclient::{Form, Method, Response};
use std::process::ExitCode;

const USAGE: &str = "httpclient [GET/POST] [URL]";

#[derive(Parser)]
#[command(name = "httpclient")]
#[command(about = "Send GET or POST request over a raw socket", long_about = None)]
#[command(override_usage = USAGE)]
struct Cli {
    /// Form field sent with POST, as `key=value`
    #[arg(short, long = "data", value_name = "KEY=VALUE", value_parser = parse_field)]
    data: Vec<(String, String)>,

    /// Either `URL`, or `METHOD URL`
    #[arg(num_args = 0..=2, value_names = ["METHOD", "URL"])]
    args: Vec<String>,
}

fn parse_field(field: &str) -> Result<(String, String), String> {
    match field.split_once('=') {
        Some((key, value)) => Ok((key.to_owned(), value.to_owned())),
        None => Err(format!("expected `key=value`, found `{field}`")),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let (method, url) = match cli.args.as_slice() {
        [url] => (Method::GET, url),
        [method, url] => (Method::from_selector(method), url),
        _ => {
            println!("{USAGE}\n");
            return ExitCode::FAILURE;
        },
    };

    let form = Form::from_iter(cli.data);
    let form = (!form.is_empty()).then_some(&form);

    match httpclient::execute(url, method, form) {
        Ok(res) => {
            print_response(&res);
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn print_response(res: &Response) {
    println!("==================SERVER RESPONSE START==================");
    println!("{}", res.message());
    println!("===================SERVER RESPONSE END===================");
    println!("{res}");
}
