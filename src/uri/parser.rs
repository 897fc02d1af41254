use super::{DEFAULT_PORT, Target, UriError};

const SCHEME_HTTP: &[u8] = b"http";

pub(super) fn parse_http(url: &str) -> Result<Target, UriError> {
    let url = url.trim_matches(|c: char| c.is_ascii_whitespace());

    let Some((scheme, rest)) = split_scheme(url) else {
        return Err(UriError::UnsupportedScheme);
    };
    if !scheme.as_bytes().eq_ignore_ascii_case(SCHEME_HTTP) {
        return Err(UriError::UnsupportedScheme);
    }

    // without `//` there is no authority, thus no host to connect to
    let Some(rest) = rest.strip_prefix("//") else {
        return Err(UriError::EmptyHost);
    };

    let (authority, rest) = match rest.find(['/', '?', '#']) {
        Some(delim) => rest.split_at(delim),
        None => (rest, ""),
    };
    let (host, port) = parse_authority(authority)?;

    // fragment is trimmed
    let rest = match rest.split_once('#') {
        Some((lead, _)) => lead,
        None => rest,
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None => (rest, ""),
    };

    let mut target = String::with_capacity(path.len() + query.len() + 2);
    if path.is_empty() {
        target.push('/');
    } else {
        target.push_str(path);
    }
    if !query.is_empty() {
        target.push('?');
        target.push_str(query);
    }

    Ok(Target {
        host,
        port,
        path: target,
    })
}

/// Split `scheme:rest`.
///
/// Returns `None` if there is no valid scheme.
fn split_scheme(url: &str) -> Option<(&str, &str)> {
    let mut state = url.as_bytes();

    match state {
        [lead, rest @ ..] if lead.is_ascii_alphabetic() => state = rest,
        _ => return None,
    }

    while let [byte, rest @ ..] = state {
        match byte {
            b':' => {
                let scheme_len = url.len() - state.len();
                return Some((&url[..scheme_len], &url[scheme_len + 1..]));
            },
            b'+' | b'-' | b'.' => state = rest,
            byte if byte.is_ascii_alphanumeric() => state = rest,
            _ => return None,
        }
    }

    None
}

fn parse_authority(authority: &str) -> Result<(String, u16), UriError> {
    // userinfo
    let authority = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };

    let is_ipv6 = authority.starts_with('[');

    let (host, port) = if let Some(ip) = authority.strip_prefix('[') {
        let Some((ip, rest)) = ip.split_once(']') else {
            return Err(UriError::Char);
        };
        // zone id, e.g: `fe80::1%25eth0`
        let (addr, zone) = match ip.split_once('%') {
            Some((addr, zone)) => (addr, zone),
            None => (ip, ""),
        };
        if !addr.bytes().all(|b| b.is_ascii_hexdigit() || matches!(b, b':' | b'.')) {
            return Err(UriError::Char);
        }
        if !zone.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'%' | b'-' | b'.' | b'_' | b'~')) {
            return Err(UriError::Char);
        }
        let port = match rest {
            "" => None,
            _ => match rest.strip_prefix(':') {
                Some(port) => Some(port),
                None => return Err(UriError::Char),
            },
        };
        (ip, port)
    } else {
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    if host.is_empty() {
        return Err(UriError::EmptyHost);
    }
    if !is_ipv6 && !host.bytes().all(is_regname) {
        return Err(UriError::Char);
    }

    let port = match port {
        // `example.com:` have no port
        None | Some("") => DEFAULT_PORT,
        Some(port) => parse_port(port)?,
    };

    Ok((host.to_ascii_lowercase(), port))
}

/// Non-ASCII bytes are part of an internationalized host and are kept as is.
const fn is_regname(byte: u8) -> bool {
    !byte.is_ascii() || byte.is_ascii_graphic() && !matches!(byte, b':' | b'@' | b'[' | b']')
}

fn parse_port(port: &str) -> Result<u16, UriError> {
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UriError::InvalidPort);
    }
    port.parse().map_err(|_| UriError::InvalidPort)
}
