/// HTTP Method.
///
/// Only the two methods this client can send are supported, [`GET`][Method::GET] and
/// [`POST`][Method::POST].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Method(Inner);

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
enum Inner {
    #[default]
    Get,
    Post,
}

impl Method {
    /// The [GET] method requests transfer of a current selected representation for the target
    /// resource.
    ///
    /// [GET]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-get>
    pub const GET: Self = Self(Inner::Get);

    /// The [POST] method requests that the target resource process the representation enclosed
    /// in the request according to the resource's own specific semantics.
    ///
    /// [POST]: <https://www.rfc-editor.org/rfc/rfc9110.html#name-post>
    pub const POST: Self = Self(Inner::Post);

    /// Select method from a command name.
    ///
    /// Exactly `"POST"` selects [`Method::POST`], anything else falls back to [`Method::GET`].
    /// Use [`str::parse`] for a strict conversion.
    #[inline]
    pub fn from_selector(command: &str) -> Self {
        match command {
            "POST" => Self::POST,
            _ => Self::GET,
        }
    }

    /// Create [`Method`] from bytes.
    #[inline]
    pub const fn from_bytes(src: &[u8]) -> Option<Method> {
        match src {
            b"GET" => Some(Self::GET),
            b"POST" => Some(Self::POST),
            _ => None,
        }
    }

    /// Returns string representation of the method.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Get => "GET",
            Inner::Post => "POST",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes()).ok_or(UnknownMethod)
    }
}

impl std::fmt::Debug for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for Method {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Error =====

pub struct UnknownMethod;

impl std::error::Error for UnknownMethod { }

impl std::fmt::Debug for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

impl std::fmt::Display for UnknownMethod {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown method")
    }
}

#[test]
fn test_method_selector() {
    assert_eq!(Method::from_selector("POST"), Method::POST);
    assert_eq!(Method::from_selector("GET"), Method::GET);
    assert_eq!(Method::from_selector("post"), Method::GET);
    assert_eq!(Method::from_selector("DELETE"), Method::GET);
    assert_eq!(Method::from_selector(""), Method::GET);
    assert_eq!(Method::default(), Method::GET);

    assert_eq!("POST".parse::<Method>().ok(), Some(Method::POST));
    assert!("PUT".parse::<Method>().is_err());
}
