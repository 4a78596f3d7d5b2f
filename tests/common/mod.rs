use httpmock::MockServer;
use unosend::Client;

pub const API_KEY: &str = "un_test_123";

pub fn client_for(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}
