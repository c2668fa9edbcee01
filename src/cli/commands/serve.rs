//! Web server command.

use console::style;

use crate::config::Settings;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting skillscout server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    if !settings.gemini.is_configured() {
        println!(
            "  {} GEMINI_API_KEY not set; model-backed endpoints return fallback responses",
            style("!").yellow()
        );
    }
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8000" -> 0.0.0.0:8000
/// - Just a host: "127.0.0.1" -> 127.0.0.1:8000
/// - Host and port: "0.0.0.0:8000" -> 0.0.0.0:8000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("0.0.0.0".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 8000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_address() {
        assert_eq!(
            parse_bind_address("9000").unwrap(),
            ("0.0.0.0".to_string(), 9000)
        );
        assert_eq!(
            parse_bind_address("127.0.0.1").unwrap(),
            ("127.0.0.1".to_string(), 8000)
        );
        assert_eq!(
            parse_bind_address("0.0.0.0:9000").unwrap(),
            ("0.0.0.0".to_string(), 9000)
        );
    }
}
