pub mod coordinates;
pub mod distance_matrix_api;
pub mod distance_matrix_response;
