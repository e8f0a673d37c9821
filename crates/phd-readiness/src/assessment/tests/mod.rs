mod common;
mod policy;
mod prestige;
