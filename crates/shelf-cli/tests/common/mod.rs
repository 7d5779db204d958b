use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Run the CLI with an isolated HOME so the user's config is never touched.
pub fn run_cli_with_env(args: &[&str], home: &Path, backend_url: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shelf"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env_remove("SHELF_BACKEND_URL");
    cmd.env("NO_COLOR", "1");
    if let Some(url) = backend_url {
        cmd.env("SHELF_BACKEND_URL", url);
    }
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated HOME and expect success.
pub fn run_cli_success(args: &[&str], home: &Path, backend_url: Option<&str>) -> String {
    let output = run_cli_with_env(args, home, backend_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn book_json(id: &str, title: &str, year: i32) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Frank Herbert",
        "genre": "Science fiction",
        "year": year,
        "added": "2023-01-05",
        "checkOutCount": 0,
        "status": "AVAILABLE",
        "dueDate": null,
        "comment": null
    })
}

pub fn page_json(content: Vec<Value>, total: u64, page_size: u32) -> Value {
    json!({
        "content": content,
        "totalElements": total,
        "pageIndex": 0,
        "pageSize": page_size
    })
}
