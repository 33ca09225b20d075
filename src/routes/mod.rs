pub mod debug;
pub mod fallback;
pub mod health;
pub mod login;
pub mod system_info;
pub mod tunnel_test;
