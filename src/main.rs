use std::str::FromStr;

use mutable_uri::{MutableUri, QueryParameters, UriError, UriFacade};
use tracing::Level;

fn main() {
    let level = std::env::args()
        .nth(1)
        .and_then(|arg| Level::from_str(&arg).ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    println!("mutable-uri walkthrough");
    println!("=======================");

    println!("\n1. Building from the empty URI:");
    match build_from_empty() {
        Ok(uri) => println!("  → {}", uri),
        Err(e) => println!("  ✗ Error: {}", e),
    }

    println!("\n2. Editing a parsed URL:");
    let inputs = vec![
        "https://api.github.com/repos?page=1",
        "http://example.com:8080/a/b#top",
        "/relative/path?q=1",
    ];
    for input in inputs {
        println!("  {}", input);
        match edit_parsed(input) {
            Ok(uri) => println!("    → {}", uri),
            Err(e) => println!("    ✗ Error: {}", e),
        }
    }

    println!("\n3. Rejected writes:");
    let mut uri = MutableUri::parse("https://example.com/").unwrap_or_default();
    for host in ["bad host", "[::1", "example.org"] {
        match uri.set_host(host).map(|_| ()) {
            Ok(()) => println!("  host {:?} ✓ accepted → {}", host, uri),
            Err(e) => println!("  host {:?} ✓ rejected: {}", host, e),
        }
    }
    for input in ["https://example.com:99999/", "http://[::1"] {
        match MutableUri::parse(input) {
            Ok(_) => println!("  {} ✗ Unexpectedly parsed", input),
            Err(e) => println!("  {} ✓ rejected: {}", input, e),
        }
    }

    println!("\n4. Copies are independent:");
    let original = MutableUri::parse("https://example.com/a").unwrap_or_default();
    let mut copy = MutableUri::from(&original);
    match copy.append_to_path("/b").map(|_| ()) {
        Ok(()) => println!("  original: {}\n  copy:     {}", original, copy),
        Err(e) => println!("  ✗ Error: {}", e),
    }
}

fn build_from_empty() -> Result<MutableUri, UriError> {
    let mut uri = MutableUri::new();
    uri.set_scheme("https")?
        .set_host("example.com")?
        .set_path("path/to/resource")?
        .set_query_parameters(&QueryParameters::from([("limit", "10"), ("format", "json")]))?;
    Ok(uri)
}

fn edit_parsed(input: &str) -> Result<MutableUri, UriError> {
    let mut uri = MutableUri::parse(input)?;
    uri.add_path_segment("extra segment")?
        .set_query_param("page", "2")?
        .set_fragment("section")?;
    Ok(uri)
}
