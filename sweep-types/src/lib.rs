//! Low-level protocol types for sweep: events, tags, filters, and the
//! addressing scheme used to link to replaceable events.

include!("macros.rs");

mod addr;
pub use addr::Addr;

mod error;
pub use error::{Error, InnerError};

mod event;
pub use event::{Event, EventTemplate};

mod filter;
pub use filter::Filter;

mod id;
pub use id::Id;

mod kind;
pub use kind::Kind;

mod naddr;

mod pubkey;
pub use pubkey::Pubkey;

mod tags;
pub use tags::{Tag, Tags};

mod time;
pub use time::Time;
