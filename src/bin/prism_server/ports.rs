use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

const PROBE_LIMIT: u16 = 200;

// A port counts as taken when something accepts a connection on it.
fn in_use(port: u16) -> bool {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    TcpStream::connect_timeout(&addr, Duration::from_millis(100)).is_ok()
}

/// First port at or above `start` with nothing listening on localhost.
pub(super) fn find_free_port(start: u16) -> Option<u16> {
    (start..start.saturating_add(PROBE_LIMIT)).find(|p| !in_use(*p))
}

#[cfg(test)]
#[path = "../../tests/bin/prism_server/ports_tests.rs"]
mod tests;
