use crate::port_scan::domain::Port;
use crate::shared::error::PortFinderError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// The recommended port and how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "port", rename_all = "lowercase")]
pub enum FreePort {
    /// The lowest unused port between the observed minimum and maximum
    Hole(Port),
    /// The observed ports are contiguous; one past the maximum
    Next(Port),
}

impl fmt::Display for FreePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreePort::Hole(port) => write!(f, "Patch a hole with the free PORT: {}", port),
            FreePort::Next(port) => write!(f, "Next free PORT: {}", port),
        }
    }
}

/// FreePortFinder - computes the recommendation from the observed ports
pub struct FreePortFinder;

impl FreePortFinder {
    /// Finds the smallest port in `[min, max]` that is not in `ports`, or
    /// `max + 1` when there is none.
    ///
    /// Duplicates in `ports` are harmless.
    ///
    /// # Errors
    /// - `EmptyPortSet` when `ports` is empty (`files` is only used for the message)
    /// - `PortRangeExhausted` when the ports are contiguous up to 65535
    pub fn find(ports: &[Port], files: usize) -> Result<FreePort> {
        let observed: BTreeSet<Port> = ports.iter().copied().collect();

        let (Some(&lo), Some(&hi)) = (observed.first(), observed.last()) else {
            return Err(PortFinderError::EmptyPortSet { files }.into());
        };

        // Ports are unique and sorted, so the first gap between neighbours is the lowest hole
        let hole = observed
            .iter()
            .zip(observed.iter().skip(1))
            .find(|(current, next)| current.value() + 1 < next.value())
            .and_then(|(current, _)| current.next());

        if let Some(hole) = hole {
            debug_assert!(lo < hole && hole < hi);
            return Ok(FreePort::Hole(hole));
        }

        hi.next()
            .map(FreePort::Next)
            .ok_or_else(|| PortFinderError::PortRangeExhausted { highest: hi.value() }.into())
    }
}
