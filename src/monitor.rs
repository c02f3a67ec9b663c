use log::{debug, warn};

use x11rb::connection::Connection;
use x11rb::protocol::randr::{ConnectionExt as _, GetOutputInfoReply};
use x11rb::rust_connection::RustConnection;

use crate::error::{Error, Result};

/// Assumed monitor count whenever the display query fails.
pub const FALLBACK_MONITORS: usize = 1;

/// How an output advertises its preferred configuration. Servers differ:
/// newer ones expose a boolean flag, older ones only the number of
/// preferred modes. The reply is resolved into one of these exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPreference {
    Modern { preferred: bool },
    Legacy { num_preferred: u16 },
}

impl OutputPreference {
    pub fn is_preferred(self) -> bool {
        match self {
            OutputPreference::Modern { preferred } => preferred,
            OutputPreference::Legacy { num_preferred } => num_preferred != 0,
        }
    }
}

impl From<&GetOutputInfoReply> for OutputPreference {
    fn from(info: &GetOutputInfoReply) -> Self {
        OutputPreference::Legacy {
            num_preferred: info.num_preferred,
        }
    }
}

/// Number of outputs in `outputs` flagged preferred.
pub fn preferred_count<I>(outputs: I) -> usize
where
    I: IntoIterator<Item = OutputPreference>,
{
    outputs.into_iter().filter(|o| o.is_preferred()).count()
}

/// Ask the X server how many outputs advertise a preferred mode.
///
/// One blocking round trip per output, relative to the resources'
/// configuration timestamp. A count of 0 is a legitimate answer on a
/// healthy connection (all outputs cloned or without a preferred mode).
pub fn query_preferred_outputs(display_name: Option<&str>) -> Result<usize> {
    let (conn, screen_num) =
        RustConnection::connect(display_name).map_err(|_| Error::ConnectionFailed)?;
    let root = conn
        .setup()
        .roots
        .get(screen_num)
        .ok_or(Error::NoScreen)?
        .root;

    let resources = conn.randr_get_screen_resources(root)?.reply()?;

    let mut outputs = Vec::with_capacity(resources.outputs.len());
    for output in resources.outputs {
        let info = conn
            .randr_get_output_info(output, resources.config_timestamp)?
            .reply()?;
        outputs.push(OutputPreference::from(&info));
    }
    debug!("outputs = {:?}", outputs);

    Ok(preferred_count(outputs))
}

/// Apply the degradation policy: a failed query means "assume one monitor",
/// a successful one is taken at face value, zero included.
pub fn monitors_or_fallback(queried: Result<usize>) -> usize {
    match queried {
        Ok(n) => n,
        Err(err) => {
            warn!("monitor query failed, assuming a single monitor: {}", err);
            FALLBACK_MONITORS
        }
    }
}

/// Monitor count used to provision screens, computed once at load time.
/// Hotplug after this point requires a configuration reload.
pub fn count_preferred_monitors() -> usize {
    monitors_or_fallback(query_preferred_outputs(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_variants() {
        assert!(OutputPreference::Modern { preferred: true }.is_preferred());
        assert!(!OutputPreference::Modern { preferred: false }.is_preferred());
        assert!(OutputPreference::Legacy { num_preferred: 1 }.is_preferred());
        assert!(OutputPreference::Legacy { num_preferred: 3 }.is_preferred());
        assert!(!OutputPreference::Legacy { num_preferred: 0 }.is_preferred());
    }

    #[test]
    fn counts_only_preferred_outputs() {
        let outputs = vec![
            OutputPreference::Modern { preferred: false },
            OutputPreference::Modern { preferred: true },
            OutputPreference::Modern { preferred: true },
        ];
        assert_eq!(preferred_count(outputs), 2);

        let outputs = vec![
            OutputPreference::Legacy { num_preferred: 0 },
            OutputPreference::Legacy { num_preferred: 2 },
            OutputPreference::Legacy { num_preferred: 1 },
        ];
        assert_eq!(preferred_count(outputs), 2);

        assert_eq!(preferred_count(Vec::new()), 0);
    }

    #[test]
    fn failed_query_falls_back_to_one() {
        assert_eq!(monitors_or_fallback(Err(Error::ConnectionFailed)), 1);
        assert_eq!(monitors_or_fallback(Err(Error::NoScreen)), 1);
    }

    #[test]
    fn successful_query_passes_through() {
        // 0 is not an error: it means no output was flagged preferred, and
        // screen assignment still provisions its first slot.
        assert_eq!(monitors_or_fallback(Ok(0)), 0);
        assert_eq!(monitors_or_fallback(Ok(1)), 1);
        assert_eq!(monitors_or_fallback(Ok(4)), 4);
    }
}
