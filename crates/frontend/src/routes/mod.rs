mod dispatch;
pub mod routes;
