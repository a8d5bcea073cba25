
mod delete;
mod filter;
mod insert;

pub use crate::scheduling::ranges::{
    delete::RangeDelete,
    filter::{DateFilter, RangeFilter},
    insert::RangeInsert,
};
