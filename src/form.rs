//! `application/x-www-form-urlencoded` request body.
use bytes::BufMut;

/// `Content-Type` of an encoded [`Form`].
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered form fields.
///
/// Fields are encoded in insertion order as `key=value` pairs joined with `&`.
///
/// Keys and values are written as is, no percent encoding is applied. Callers that need to
/// send reserved characters must encode them beforehand.
///
/// # Examples
///
/// ```
/// # use httpclient::Form;
/// let form = Form::from([("a", "1"), ("b", "2")]);
/// assert_eq!(form.to_string(), "a=1&b=2");
/// assert_eq!(form.encoded_len(), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(String, String)>,
}

impl Form {
    /// Create new empty [`Form`].
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field.
    #[inline]
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Append a field, builder style.
    #[inline]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over fields in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the byte length of the encoded body.
    pub fn encoded_len(&self) -> usize {
        let pairs: usize = self.fields.iter().map(|(k, v)| k.len() + 1 + v.len()).sum();
        pairs + self.fields.len().saturating_sub(1)
    }

    /// Write encoded body into buffer.
    pub fn write_to<B: BufMut>(&self, mut buf: B) {
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i != 0 {
                buf.put_u8(b'&');
            }
            buf.put_slice(key.as_bytes());
            buf.put_u8(b'=');
            buf.put_slice(value.as_bytes());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Form {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Form {
    #[inline]
    fn from(value: [(K, V); N]) -> Self {
        Self::from_iter(value)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Form {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.fields.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str("&")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use bytes::BytesMut;

    use super::Form;

    #[test]
    fn test_form_encode() {
        let form = Form::from([("a", "1"), ("b", "2")]);
        let mut buf = BytesMut::new();
        form.write_to(&mut buf);
        assert_eq!(&buf[..], b"a=1&b=2");
        assert_eq!(form.encoded_len(), 7);
        assert_eq!(form.to_string(), "a=1&b=2");
    }

    #[test]
    fn test_form_order() {
        let form = Form::new().field("z", "26").field("a", "1").field("m", "13");
        assert_eq!(form.to_string(), "z=26&a=1&m=13");
        assert_eq!(form.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn test_form_empty() {
        let form = Form::new();
        let mut buf = BytesMut::new();
        form.write_to(&mut buf);
        assert!(buf.is_empty());
        assert_eq!(form.encoded_len(), 0);
        assert!(form.is_empty());
    }

    #[test]
    fn test_form_not_escaped() {
        let mut form = Form::new();
        form.push("q", "a b&c");
        form.extend([("é", "ü")]);
        assert_eq!(form.to_string(), "q=a b&c&é=ü");
        assert_eq!(form.encoded_len(), "q=a b&c&é=ü".len());
        assert_eq!(form.len(), 2);
    }
}
