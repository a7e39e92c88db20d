//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod lists;

pub use lists::{
    CreateListItemUseCase, DeleteListItemUseCase, GetAllListItemsUseCase, GetListItemByIdUseCase,
    UpdateListItemUseCase,
};
