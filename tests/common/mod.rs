use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/*-------------------------------------------------------------------------------------------------
  Test HTTP Server
-------------------------------------------------------------------------------------------------*/

/// Serve canned responses on a local port; returns the server's base URL (`http://127.0.0.1:N`).
/// Each route maps a request path to a status code and body. Unknown paths return 404.
pub fn serve(routes: &[(&str, u16, &str)]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
        .collect();

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            respond(stream, &routes);
        }
    });

    base_url
}

fn respond(mut stream: TcpStream, routes: &HashMap<String, (u16, String)>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }

    // Drain request headers
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => continue,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes
        .get(path)
        .cloned()
        .unwrap_or((404, "Not Found".to_string()));

    let response = format!(
        "HTTP/1.1 {status} Test\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/*-------------------------------------------------------------------------------------------------
  Test Documents
-------------------------------------------------------------------------------------------------*/

pub const DOWNLOAD_PAGE: &str = r#"<html>
  <body>
    <a href="https://download.microsoft.com/download/ServiceTags_Public_20240115.json">
      Download
    </a>
  </body>
</html>"#;

pub const SERVICE_TAGS_JSON: &str = r#"{
  "changeNumber": 312,
  "cloud": "Public",
  "values": [
    {
      "name": "AzureBotService",
      "id": "AzureBotService",
      "properties": {"addressPrefixes": ["40.0.0.0/25", "40.0.0.0/24"]}
    },
    {
      "name": "AzureCloud",
      "id": "AzureCloud",
      "properties": {
        "addressPrefixes": [
          "10.10.0.0/16",
          "10.2.0.0/16",
          "10.3.0.0/16",
          "2603:1000::/25",
          "2603:1080::/25"
        ]
      }
    }
  ]
}"#;
