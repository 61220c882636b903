use std::fmt;

use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub struct PageUrl(Url);

impl PageUrl {
    pub fn parse(raw: &str) -> Result<PageUrl, String> {
        let raw = raw.trim();

        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }

        let url = Url::parse(raw).map_err(|e| format!("{} is not a valid URL: {}", raw, e))?;
        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(PageUrl(url)),
            _ => Err(format!("{} has no host", raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
