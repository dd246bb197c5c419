//! Headless view synchronization engine.
//!
//! Everything in here is single-threaded and driven by a logical clock
//! ([`timers::TimerQueue`]). The terminal shell feeds it input events and
//! wall-clock deltas; tests feed it directly.

pub mod command_filter;
pub mod dashboard;
pub mod disclosure;
pub mod listeners;
pub mod notice;
pub mod router;
pub mod shortcuts;
pub mod stream;
pub mod timers;
pub mod transition;

pub use self::command_filter::{COMMAND_CATALOG, CommandEntry, CommandFilter, Icon};
pub use self::dashboard::{
    DEPLOY_SUCCESS_NOTICE, Dashboard, DashboardEvent, DashboardSettings, Panel,
};
pub use self::disclosure::{ContentShift, HoverDisclosure};
pub use self::listeners::{Listeners, Subscription};
pub use self::notice::Notice;
pub use self::router::{Fragment, FragmentRouter, Location, MemoryLocation, Route, ViewId};
pub use self::shortcuts::{Chord, ShortcutAction, ShortcutId, Shortcuts};
pub use self::stream::{LogColor, LogEntry, LogLevel, LogViewport, StreamPhase, StreamPlayer};
pub use self::timers::{Fired, Millis, TimerHandle, TimerPurpose, TimerQueue, Timers};
pub use self::transition::TransitionGate;
