mod change_password;
mod client;
mod login;
mod verify_token;
