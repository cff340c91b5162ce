/// Product CRUD, search and inventory summary
pub mod product;
