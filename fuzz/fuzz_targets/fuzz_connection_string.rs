#![no_main]

use libfuzzer_sys::fuzz_target;
use mssql_conn::OdbcConnectionString;

fuzz_target!(|input: &str| {
    if let Ok(parsed) = OdbcConnectionString::parse(input) {
        let _ = parsed.server_address();
        let _ = parsed.to_tds_config();
        let _ = format!("{:?}", parsed);
    }
});
