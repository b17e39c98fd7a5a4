#![allow(dead_code)]

use heartcheck::application::validation::RawClinicalInput;
use heartcheck::domain::clinical::{
    ChestPain, ExerciseAngina, FastingBloodSugar, MajorVessels, RestEcg, SexChoice, StSlope,
    Thalassemia,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Request as seen on the wire by the canned server
#[derive(Debug)]
pub struct CapturedRequest {
    pub head: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// Serves exactly one HTTP response on an ephemeral port and hands back the request.
pub async fn serve_once(
    status: u16,
    reason: &str,
    body: &str,
) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/predict", addr), handle)
}

/// URL of a port that was bound and released, so connections are refused
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/predict", addr)
}

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        assert!(n > 0, "client closed before sending a full request");
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let length = content_length(&head);
            let body_start = end + 4;
            if buf.len() >= body_start + length {
                return CapturedRequest {
                    head,
                    body: buf[body_start..body_start + length].to_vec(),
                };
            }
        }
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Form contents from the reference scenario: 45-year-old male, expected valid
pub fn scenario_input() -> RawClinicalInput {
    RawClinicalInput {
        age: "45".to_string(),
        trestbps: "130".to_string(),
        chol: "250".to_string(),
        thalach: "150".to_string(),
        oldpeak: "1.0".to_string(),
        sex: SexChoice::from_label("Male"),
        cp: ChestPain::NonAnginalPain,
        fbs: FastingBloodSugar::False,
        restecg: RestEcg::StTAbnormality,
        exang: ExerciseAngina::No,
        slope: StSlope::Flat,
        ca: MajorVessels::Zero,
        thal: Thalassemia::ReversibleDefect,
    }
}
