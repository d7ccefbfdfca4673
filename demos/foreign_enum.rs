//! Wiring up an enum you don't own: implement `Cases` by hand, then build
//! case paths from the constructors alone.

use std::any::Any;

use rust_case_paths::{CasePath, Cases};

// Stand-in for a third-party type whose definition can't take a derive.
#[derive(Debug, Clone, PartialEq)]
enum WireEvent {
    Heartbeat,
    Payload(Vec<u8>),
    Error(String),
    Wrapped(Box<WireEvent>),
}

impl Cases for WireEvent {
    const CASES: usize = 4;

    fn case_name(&self) -> &'static str {
        match self {
            WireEvent::Heartbeat => "Heartbeat",
            WireEvent::Payload(_) => "Payload",
            WireEvent::Error(_) => "Error",
            WireEvent::Wrapped(_) => "Wrapped",
        }
    }

    fn payload(&self) -> Option<&dyn Any> {
        match self {
            WireEvent::Heartbeat => None,
            WireEvent::Payload(bytes) => Some(bytes),
            WireEvent::Error(message) => Some(message),
            WireEvent::Wrapped(inner) => Some(&**inner),
        }
    }
}

fn main() {
    let payload: CasePath<WireEvent, Vec<u8>> = CasePath::case(WireEvent::Payload);
    let error: CasePath<WireEvent, String> = CasePath::case(WireEvent::Error);
    let heartbeat: CasePath<WireEvent, ()> = CasePath::case(|_unit| WireEvent::Heartbeat);

    let events = [
        WireEvent::Heartbeat,
        WireEvent::Payload(vec![1, 2, 3]),
        WireEvent::Error("timeout".into()),
        WireEvent::Wrapped(Box::new(WireEvent::Payload(vec![9]))),
    ];

    for event in &events {
        println!(
            "{:>9}: payload={:?} error={:?} heartbeat={}",
            event.case_name(),
            payload.extract(event),
            error.extract(event),
            heartbeat.matches(event),
        );
    }

    // Descend through the indirection with a composed path
    let wrapped: CasePath<WireEvent, WireEvent> =
        CasePath::case(|inner| WireEvent::Wrapped(Box::new(inner)));
    let inner_payload = wrapped.then(payload.clone());
    println!(
        "wrapped payload: {:?}",
        inner_payload.extract(&events[3])
    );
}
