mod all;
mod contact;
mod footer;
mod log;
mod sections;
mod tabs;

use self::log::log;
use super::*;
use contact::contact;
use footer::footer;
use sections::section;
use tabs::tabs;

pub use all::all as render;
