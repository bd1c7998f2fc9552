mod api;
mod control_client;
mod helpers;
mod link;
