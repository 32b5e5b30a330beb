//! Shared fixtures for integration tests: scripted resolvers, an event
//! collector, and loopback listener helpers for the reachable / refused /
//! stalled address shapes the race distinguishes.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener as StdTcpListener, TcpStream as StdTcpStream};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dialrace_client::dns::wire::{Message, RData};
use dialrace_client::error::BoxError;
use dialrace_client::{DialEvent, EventSink, Name, Resolve, Resolving};

/// Resolver scripted with a fixed, ordered address list.
pub struct ScriptedResolver {
    addrs: Vec<SocketAddr>,
    fail: Option<String>,
}

impl ScriptedResolver {
    pub fn returning(addrs: Vec<SocketAddr>) -> Self {
        Self { addrs, fail: None }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            addrs: Vec::new(),
            fail: Some(message.to_string()),
        }
    }
}

impl Resolve for ScriptedResolver {
    fn resolve(&self, _name: Name) -> Resolving {
        let addrs = self.addrs.clone();
        let fail = self.fail.clone();
        Box::pin(async move {
            match fail {
                Some(message) => Err(message.into()),
                None => Ok(addrs),
            }
        })
    }
}

/// Resolver that must never be reached (literal-address fast path tests).
pub struct PanicResolver;

impl Resolve for PanicResolver {
    fn resolve(&self, name: Name) -> Resolving {
        panic!("resolver unexpectedly invoked for {name}");
    }
}

/// Resolver that answers from an encoded DNS message, the way a mock DNS
/// server would: the response bytes are decoded with the wire codec and
/// the A/AAAA answer records become the candidate list.
pub struct WireResolver {
    response: Vec<u8>,
}

impl WireResolver {
    pub fn from_message(message: &Message) -> Self {
        Self {
            response: message.encode().expect("test message encodes"),
        }
    }
}

impl Resolve for WireResolver {
    fn resolve(&self, _name: Name) -> Resolving {
        let wire = self.response.clone();
        Box::pin(async move {
            let message = Message::decode(&wire)?;
            let addrs: Vec<SocketAddr> = message
                .answers
                .iter()
                .filter_map(|record| match record.rdata {
                    RData::A(ip) => Some(SocketAddr::new(ip.into(), 0)),
                    RData::AAAA(ip) => Some(SocketAddr::new(ip.into(), 0)),
                    _ => None,
                })
                .collect();
            if addrs.is_empty() {
                return Err(BoxError::from("no address records in response"));
            }
            Ok(addrs)
        })
    }
}

/// Event sink that records everything it sees.
#[derive(Clone, Default)]
pub struct CollectSink {
    events: Arc<Mutex<Vec<DialEvent>>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DialEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for CollectSink {
    fn emit(&self, event: DialEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Bind an IPv4 loopback listener on a port that is free on `[::1]` too,
/// so connects to `[::1]:port` fail while `127.0.0.1:port` succeeds.
///
/// Environments without IPv6 make the `[::1]` probe fail outright; connects
/// to `[::1]` fail there as well, which is all these tests need.
pub fn v4_listener_with_free_v6() -> (StdTcpListener, u16) {
    for _ in 0..16 {
        let listener = StdTcpListener::bind(("127.0.0.1", 0)).expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        match StdTcpListener::bind(("::1", port)) {
            Ok(probe) => {
                drop(probe);
                return (listener, port);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => continue,
            // No IPv6 on this host: the port still works for the tests.
            Err(_) => return (listener, port),
        }
    }
    panic!("could not find a port free on both loopback stacks");
}

/// A port with nothing listening on either loopback stack.
pub fn free_port_both_families() -> u16 {
    for _ in 0..16 {
        let v4 = StdTcpListener::bind(("127.0.0.1", 0)).expect("bind loopback");
        let port = v4.local_addr().expect("local addr").port();
        match StdTcpListener::bind(("::1", port)) {
            Ok(v6) => {
                drop(v6);
                drop(v4);
                return port;
            }
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => continue,
            Err(_) => {
                drop(v4);
                return port;
            }
        }
    }
    panic!("could not find a port free on both loopback stacks");
}

/// A listener whose accept queue is saturated: further connects sit in the
/// SYN queue without completing or being refused, so the per-attempt
/// deadline is the only thing that ends them.
pub struct StalledListener {
    _socket: socket2::Socket,
    _fillers: Vec<StdTcpStream>,
    pub port: u16,
}

pub fn stalled_listener() -> StalledListener {
    use socket2::{Domain, Socket, Type};

    let socket = Socket::new(Domain::IPV4, Type::STREAM, None).expect("socket");
    let bind_addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    socket.bind(&bind_addr.into()).expect("bind");
    socket.listen(0).expect("listen");
    let port = socket
        .local_addr()
        .expect("local addr")
        .as_socket()
        .expect("inet addr")
        .port();

    // listen(0) still admits one connection; fill it (and a possible extra
    // slot) so later connects stall.
    let mut fillers = Vec::new();
    let addr: SocketAddr = format!("127.0.0.1:{port}").parse().unwrap();
    for _ in 0..2 {
        if let Ok(stream) = StdTcpStream::connect_timeout(&addr, Duration::from_millis(100)) {
            fillers.push(stream);
        }
    }

    StalledListener {
        _socket: socket,
        _fillers: fillers,
        port,
    }
}
