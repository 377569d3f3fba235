// Copyright 2026 Sweep Developers (see https://github.com/sweep-social/sweep)
// Licensed under the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>
// This file may not be copied, modified, or distributed except according to those terms.

//! The application core for sweep, a community cleanup-sharing and
//! event-scheduling platform on a decentralized social-event protocol.
//! Turns raw relay events into typed cleanup and schedule records, assembles
//! the sorted/filtered feeds the pages render, derives RSVP attendance, and
//! builds the draft events the external signer publishes.

#![deny(
    missing_debug_implementations,
    trivial_numeric_casts,
    clippy::string_slice,
    unused_import_braces,
    unused_qualifications,
    unused_results,
    unused_lifetimes,
    unused_labels,
    unused_extern_crates,
    non_ascii_idents,
    keyword_idents,
    deprecated_in_future,
    unstable_features,
    single_use_lifetimes,
    unreachable_pub,
    missing_copy_implementations,
    missing_docs
)]

mod cleanup;
pub use cleanup::{extract_cleanup_feed, CleanupContent, CleanupDraft, CleanupRecord};

mod error;
pub use error::{Error, InnerError};

mod feed;
pub use feed::{filter_by_text, partition_by_start, sort_cleanups, sort_schedule};
pub use feed::{Searchable, SortDirection};

mod queries;
pub use queries::{
    by_addr, cleanup_feed, cleanups_by_author, recent_cleanups, rsvps_for, schedule_by_author,
    schedule_feed, DETAIL_TIMEOUT, FEED_TIMEOUT, RSVP_TIMEOUT,
};

mod rsvp;
pub use rsvp::{attendees, is_attending, rsvp_template, RsvpContent, STATUS_ATTENDING};

mod schedule;
pub use schedule::{extract_schedule_feed, ScheduleContent, ScheduleDraft, ScheduleRecord};

mod session;
pub use session::Session;

use sweep_types::Kind;

/// Kind of a cleanup post (long-form content)
pub const CLEANUP_KIND: Kind = Kind::new(30023);

/// Kind of a scheduled cleanup event (calendar time-based event)
pub const SCHEDULE_KIND: Kind = Kind::new(31923);

/// Kind of an RSVP to a scheduled event
pub const RSVP_KIND: Kind = Kind::new(30311);

/// Topic ('t' tag value) marking cleanup posts
pub const CLEANUP_TOPIC: &str = "garbage-cleanup";

/// Topic ('t' tag value) marking scheduled cleanup events
pub const SCHEDULE_TOPIC: &str = "cleanup-event";
