mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::prelude::*;
    use predicates::str::contains;

    use std::io::Write;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "cachewarmer";

    fn input_file(lines: &[String]) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(lines.join("\n").as_bytes())?;
        Ok(file)
    }

    fn command(input: &tempfile::NamedTempFile) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--input")
            .arg(input.path())
            .arg("--no-progress")
            .arg("--no-config");
        Ok(cmd)
    }

    #[test]
    fn test_output__when_no_input_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().failure().stderr(contains(
            "error: the following required arguments were not provided:\n  --input <PATH>",
        ));
        Ok(())
    }

    #[test]
    fn test_output__when_input_file_missing() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--input")
            .arg("/nonexistent/urls.txt")
            .arg("--no-config");

        cmd.assert()
            .code(1)
            .stderr(contains("Error: File not found: /nonexistent/urls.txt"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_all_urls_succeed() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server
            .mock("GET", "/200")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;
        let file = input_file(&[server.url() + "/200"])?;

        command(&file)?.assert().code(0).stdout(predicate::str::is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_single_failure() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server
            .mock("GET", "/404")
            .with_status(404)
            .create_async()
            .await;
        let endpoint = server.url() + "/404";
        let file = input_file(std::slice::from_ref(&endpoint))?;

        command(&file)?
            .assert()
            .code(1)
            .stdout(contains(format!("{endpoint} response status code 404\n")))
            .stdout(contains("Too many errors, exiting").not());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_response_empty() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server
            .mock("GET", "/empty")
            .with_status(200)
            .create_async()
            .await;
        let endpoint = server.url() + "/empty";
        let file = input_file(std::slice::from_ref(&endpoint))?;

        command(&file)?
            .assert()
            .code(1)
            .stdout(contains(format!("{endpoint} response empty")));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_too_many_errors() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server
            .mock("GET", mockito::Matcher::Regex(r"^/missing/\d+$".to_string()))
            .with_status(404)
            .create_async()
            .await;
        let lines: Vec<String> = (0..20)
            .map(|i| format!("{}/missing/{i}", server.url()))
            .collect();
        let file = input_file(&lines)?;

        command(&file)?
            .arg("--max-errors")
            .arg("1")
            .assert()
            .code(1)
            .stdout(contains("Too many errors, exiting"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_errors_within_budget() -> TestResult {
        let mut server = Server::new_async().await;
        let _m404 = server
            .mock("GET", mockito::Matcher::Regex(r"^/missing/\d+$".to_string()))
            .with_status(404)
            .expect(3)
            .create_async()
            .await;
        let lines: Vec<String> = (0..3)
            .map(|i| format!("{}/missing/{i}", server.url()))
            .collect();
        let file = input_file(&lines)?;

        command(&file)?
            .arg("--max-errors")
            .arg("5")
            .arg("--threads")
            .arg("3")
            .assert()
            .code(1)
            .stdout(contains("Too many errors, exiting").not());

        _m404.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_base_is_joined() -> TestResult {
        let mut server = Server::new_async().await;
        let m_a = server
            .mock("GET", "/a")
            .with_status(200)
            .with_body("a")
            .expect(1)
            .create_async()
            .await;
        let m_b = server
            .mock("GET", "/b")
            .with_status(200)
            .with_body("b")
            .expect(1)
            .create_async()
            .await;
        let file = input_file(&["a".to_string(), "".to_string(), "/b".to_string()])?;

        command(&file)?
            .arg("--base")
            .arg(server.url() + "/")
            .assert()
            .code(0);

        m_a.assert_async().await;
        m_b.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_blank_lines_only() -> TestResult {
        let file = input_file(&["".to_string(), "   ".to_string(), "".to_string()])?;

        command(&file)?.assert().code(0).stdout(predicate::str::is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_header_check_fails() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server
            .mock("GET", "/cached")
            .with_status(200)
            .with_header("X-Cache", "HIT")
            .with_body("cached")
            .create_async()
            .await;
        let endpoint = server.url() + "/cached";
        let file = input_file(std::slice::from_ref(&endpoint))?;

        command(&file)?
            .arg("--check-headers")
            .arg("X-Cache: MISS")
            .assert()
            .code(1)
            .stdout(contains(format!(
                "{endpoint} response headers check failed (X-Cache: MISS)"
            )));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_header_check_passes() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server
            .mock("GET", "/cached")
            .with_status(200)
            .with_header("X-Cache", "HIT")
            .with_body("cached")
            .create_async()
            .await;
        let file = input_file(&[server.url() + "/cached"])?;

        command(&file)?
            .arg("--check-headers")
            .arg("x-cache: HIT")
            .assert()
            .code(0);
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_request_headers_sent() -> TestResult {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/page")
            .match_header("accept-encoding", "br")
            .match_header("x-warm", "1")
            .with_status(200)
            .with_body("page")
            .expect(1)
            .create_async()
            .await;
        let file = input_file(&[server.url() + "/page"])?;

        command(&file)?
            .arg("--headers")
            .arg("Accept-Encoding: br")
            .arg("X-Warm: 1")
            .assert()
            .code(0);

        m.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_server_error_is_retried() -> TestResult {
        let mut server = Server::new_async().await;
        let m503 = server
            .mock("GET", "/busy")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;
        let endpoint = server.url() + "/busy";
        let file = input_file(std::slice::from_ref(&endpoint))?;

        command(&file)?
            .arg("--retry-count")
            .arg("2")
            .arg("--retry-delay")
            .arg("0")
            .assert()
            .code(1)
            .stdout(contains(format!("{endpoint} response status code 503")));

        m503.assert_async().await;
        Ok(())
    }

    #[test]
    fn test_output__when_invalid_header_spec() -> TestResult {
        let file = input_file(&["http://127.0.0.1:1/".to_string()])?;

        command(&file)?
            .arg("--headers")
            .arg(": no name")
            .assert()
            .code(1)
            .stderr(contains("Error: Invalid header"));
        Ok(())
    }

    #[test]
    fn test_output__when_threads_zero() -> TestResult {
        let file = input_file(&["http://127.0.0.1:1/".to_string()])?;

        command(&file)?
            .arg("--threads")
            .arg("0")
            .assert()
            .code(1)
            .stderr(contains("Error: Configuration error"));
        Ok(())
    }

    #[test]
    fn test_output__when_config_file_used() -> TestResult {
        let file = input_file(&["".to_string()])?;
        let mut config = tempfile::NamedTempFile::new()?;
        config.write_all(b"threads = 0\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--input")
            .arg(file.path())
            .arg("--config")
            .arg(config.path());

        // Invalid value from the file is rejected
        cmd.assert()
            .code(1)
            .stderr(contains("Error: Configuration error"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_output__when_interrupted() -> TestResult {
        // Accepts connections into the backlog but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let endpoint = format!("http://{}/hang", listener.local_addr()?);
        let file = input_file(&[endpoint])?;

        let mut child = command(&file)?
            .stdout(std::process::Stdio::null())
            .spawn()?;
        std::thread::sleep(std::time::Duration::from_secs(1));

        let signalled = Command::new("kill")
            .arg("-INT")
            .arg(child.id().to_string())
            .status()?;
        assert!(signalled.success());

        let status = child.wait()?;
        assert_eq!(status.code(), Some(130));
        drop(listener);
        Ok(())
    }
}
