mod export;
mod session;
