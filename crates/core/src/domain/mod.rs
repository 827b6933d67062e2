pub mod email;
pub mod intent;
pub mod session;
pub mod turn;
