mod catalog;
mod collections;
mod properties;
mod util;
