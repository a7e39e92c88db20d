//! List Item Use Cases
//!
//! Business logic for managing list items.

mod create_list_item;
mod delete_list_item;
mod get_all_list_items;
mod get_list_item_by_id;
mod update_list_item;

pub use create_list_item::CreateListItemUseCase;
pub use delete_list_item::DeleteListItemUseCase;
pub use get_all_list_items::GetAllListItemsUseCase;
pub use get_list_item_by_id::GetListItemByIdUseCase;
pub use update_list_item::UpdateListItemUseCase;
