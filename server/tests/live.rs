//! Cookie-driven session lifecycle against a live server.
//!
//! # Design
//! Starts the server on a random port, then drives it over real HTTP with
//! ureq, carrying the session cookie by hand between requests. Validates
//! that the session survives across independent connections and that a
//! client without the cookie gets a fresh, empty session.

use serde_json::Value;
use todo_server::ServerConfig;

struct Client {
    base: String,
    agent: ureq::Agent,
    cookie: Option<String>,
}

impl Client {
    fn new(base: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            base: base.to_string(),
            agent,
            cookie: None,
        }
    }

    /// Execute a request and return the status and JSON body, remembering
    /// any session cookie the server hands out.
    fn call(&mut self, method: &str, path: &str, body: Option<&str>) -> (u16, Value) {
        let url = format!("{}{path}", self.base);
        let cookie = self.cookie.clone().unwrap_or_default();
        let mut response = match (method, body) {
            ("GET", _) => self.agent.get(&url).header("cookie", &cookie).call(),
            ("POST", Some(body)) => self
                .agent
                .post(&url)
                .header("cookie", &cookie)
                .content_type("application/json")
                .send(body.as_bytes()),
            ("POST", None) => self.agent.post(&url).header("cookie", &cookie).send_empty(),
            (other, _) => panic!("unsupported method: {other}"),
        }
        .expect("HTTP transport error");

        if let Some(set) = response.headers().get("set-cookie") {
            let pair = set.to_str().unwrap().split(';').next().unwrap().to_string();
            self.cookie = Some(pair);
        }

        let status = response.status().as_u16();
        let text = response.body_mut().read_to_string().unwrap_or_default();
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, json)
    }
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, ServerConfig::default()).await
        })
    });

    format!("http://{addr}")
}

#[test]
fn session_lifecycle() {
    let base = spawn_server();
    let mut client = Client::new(&base);

    // Step 1: first visit creates a session.
    let (status, lists) = client.call("GET", "/lists", None);
    assert_eq!(status, 200);
    assert_eq!(lists, serde_json::json!([]));
    assert!(client.cookie.is_some());

    // Step 2: create a list.
    let (status, created) = client.call("POST", "/lists", Some(r#"{"title":"Groceries"}"#));
    assert_eq!(status, 201);
    let list_id = created["list"]["id"].as_u64().unwrap();

    // Step 3: add todos.
    for title in ["Milk", "Bread", "Apples"] {
        let body = serde_json::json!({ "title": title }).to_string();
        let (status, _) = client.call("POST", &format!("/lists/{list_id}/todos"), Some(&body));
        assert_eq!(status, 201);
    }

    // Step 4: toggle Bread.
    let (_, view) = client.call("GET", &format!("/lists/{list_id}"), None);
    let bread = view["todos"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["title"] == "Bread")
        .unwrap()["id"]
        .as_u64()
        .unwrap();
    let (status, toggled) =
        client.call("POST", &format!("/lists/{list_id}/todos/{bread}/toggle"), None);
    assert_eq!(status, 200);
    assert_eq!(toggled["message"], "\"Bread\" marked done.");

    // Step 5: display order.
    let (_, view) = client.call("GET", &format!("/lists/{list_id}"), None);
    let shown: Vec<_> = view["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(shown, ["Apples", "Milk", "Bread"]);

    // Step 6: a client without the cookie sees its own empty session.
    let mut stranger = Client::new(&base);
    let (_, lists) = stranger.call("GET", "/lists", None);
    assert_eq!(lists, serde_json::json!([]));
    let (status, _) = stranger.call("GET", &format!("/lists/{list_id}"), None);
    assert_eq!(status, 404);

    // Step 7: delete the list.
    let (status, _) = client.call("POST", &format!("/lists/{list_id}/destroy"), None);
    assert_eq!(status, 200);
    let (_, lists) = client.call("GET", "/lists", None);
    assert_eq!(lists, serde_json::json!([]));
}
