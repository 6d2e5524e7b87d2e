//! ODBC connection strings
//!
//! Rendered form (field order and punctuation are fixed):
//! `DRIVER={ODBC Driver 17 for SQL Server};SERVER=host,port;DATABASE=db;UID=user;PWD=pass;TrustServerCertificate=yes;`
//!
//! Parsing accepts the general `KEY=value;` grammar:
//! * keys are case-insensitive and trimmed, values are kept verbatim
//! * values may be wrapped in `{...}`, with `}}` standing for a literal `}`
//! * when a key repeats, the first occurrence wins

use crate::error::ConnectionError;
use std::fmt;
use tiberius::{AuthMethod, EncryptionLevel};

/// Driver named in rendered connection strings
pub const ODBC_DRIVER: &str = "ODBC Driver 17 for SQL Server";

/// Port used when `SERVER` carries none
pub const DEFAULT_TDS_PORT: u16 = 1433;

pub(crate) const REDACTED: &str = "***";

/// Render a connection string. Values are inserted verbatim.
pub(crate) fn render(
    host: &str,
    port: &str,
    database: &str,
    username: &str,
    password: &str,
) -> String {
    format!(
        "DRIVER={{{ODBC_DRIVER}}};SERVER={host},{port};DATABASE={database};UID={username};PWD={password};TrustServerCertificate=yes;"
    )
}

/// Parsed ODBC connection string
#[derive(Clone, PartialEq, Eq)]
pub struct OdbcConnectionString {
    pairs: Vec<(String, String)>,
}

impl OdbcConnectionString {
    /// Parse connection string
    ///
    /// Errors report byte offsets only, never the text around them, so a
    /// malformed password cannot end up in logs.
    pub fn parse(s: &str) -> Result<Self, ConnectionError> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut chars = s.char_indices().peekable();

        loop {
            // Key
            let mut key = String::new();
            let mut key_start = chars.peek().map_or(s.len(), |&(i, _)| i);
            let mut saw_equals = false;
            for (i, c) in chars.by_ref() {
                if c == '=' {
                    saw_equals = true;
                    break;
                }
                if c == ';' {
                    if key.trim().is_empty() {
                        // Stray separator
                        key.clear();
                        key_start = i + 1;
                        continue;
                    }
                    return Err(invalid(format!("missing '=' in segment at offset {}", key_start)));
                }
                key.push(c);
            }

            let key = key.trim().to_string();
            if !saw_equals {
                if key.is_empty() {
                    break;
                }
                return Err(invalid(format!("missing '=' in segment at offset {}", key_start)));
            }
            if key.is_empty() {
                return Err(invalid(format!("empty key at offset {}", key_start)));
            }

            // Value, kept verbatim
            let mut value = String::new();
            if let Some(&(open, '{')) = chars.peek() {
                chars.next();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    if c == '}' {
                        if matches!(chars.peek(), Some(&(_, '}'))) {
                            chars.next();
                            value.push('}');
                            continue;
                        }
                        closed = true;
                        break;
                    }
                    value.push(c);
                }
                if !closed {
                    return Err(invalid(format!("unterminated '{{' at offset {}", open)));
                }
                // Only whitespace may sit between '}' and ';'
                for (i, c) in chars.by_ref() {
                    if c == ';' {
                        break;
                    }
                    if !c.is_whitespace() {
                        return Err(invalid(format!(
                            "unexpected character after braced value at offset {}",
                            i
                        )));
                    }
                }
            } else {
                for (_, c) in chars.by_ref() {
                    if c == ';' {
                        break;
                    }
                    value.push(c);
                }
            }

            if !pairs.iter().any(|(k, _)| k.eq_ignore_ascii_case(&key)) {
                pairs.push((key, value));
            }
        }

        Ok(Self { pairs })
    }

    /// Case-insensitive lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn driver(&self) -> Option<&str> {
        self.get("DRIVER")
    }

    pub fn server(&self) -> Option<&str> {
        self.get("SERVER")
    }

    pub fn database(&self) -> Option<&str> {
        self.get("DATABASE")
    }

    pub fn uid(&self) -> Option<&str> {
        self.get("UID")
    }

    pub fn pwd(&self) -> Option<&str> {
        self.get("PWD")
    }

    /// `TrustServerCertificate=yes|true`
    pub fn trust_server_certificate(&self) -> bool {
        self.get("TrustServerCertificate").is_some_and(is_truthy)
    }

    /// `Encrypt=yes|true`
    pub fn encrypt(&self) -> bool {
        self.get("Encrypt").is_some_and(is_truthy)
    }

    /// Split `SERVER` into host and port
    ///
    /// Accepts `[tcp:]host[,port]`. `.` and `(local)` mean `localhost`.
    pub fn server_address(&self) -> Result<(String, u16), ConnectionError> {
        let server = self
            .server()
            .ok_or_else(|| invalid("SERVER is required".to_string()))?;

        let server = server.trim();
        let server = strip_prefix_ignore_case(server, "tcp:").unwrap_or(server);

        let (host, port) = match server.rsplit_once(',') {
            Some((host, port)) => {
                let port = port.trim();
                let port = port
                    .parse::<u16>()
                    .map_err(|_| invalid(format!("invalid port '{}'", port)))?;
                (host.trim(), port)
            }
            None => (server.trim(), DEFAULT_TDS_PORT),
        };

        if host.is_empty() {
            return Err(invalid("SERVER has an empty host".to_string()));
        }

        let host = match host {
            "." | "(local)" => "localhost",
            other => other,
        };

        Ok((host.to_string(), port))
    }

    /// Convert to a TDS driver configuration
    pub fn to_tds_config(&self) -> Result<tiberius::Config, ConnectionError> {
        let (host, port) = self.server_address()?;

        let mut config = tiberius::Config::new();
        config.host(host);
        config.port(port);
        if let Some(database) = self.database() {
            config.database(database);
        }
        config.authentication(AuthMethod::sql_server(
            self.uid().unwrap_or_default(),
            self.pwd().unwrap_or_default(),
        ));

        if self.trust_server_certificate() {
            config.trust_cert();
        }

        // Without Encrypt=yes only the login exchange is encrypted
        config.encryption(if self.encrypt() {
            EncryptionLevel::Required
        } else {
            EncryptionLevel::Off
        });

        Ok(config)
    }
}

impl fmt::Debug for OdbcConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in &self.pairs {
            if k.eq_ignore_ascii_case("PWD") {
                map.entry(k, &REDACTED);
            } else {
                map.entry(k, v);
            }
        }
        map.finish()
    }
}

fn invalid(msg: String) -> ConnectionError {
    ConnectionError::InvalidConnectionString(msg)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true"
    )
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}
