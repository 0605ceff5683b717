//! docker 互換 CLI によるエンジン実装
//!
//! `docker` / `podman` / `nerdctl` などをサブプロセスとして実行します。
//! build と push の出力は端末にそのまま流し、終了コードだけを見ます。
//! `image inspect` だけは出力を取り込み、イメージが無い場合を失敗と区別します。

use crate::credential::Credential;
use crate::engine::ContainerEngine;
use crate::error::{BuildError, BuildResult, Step};
use crate::reference::ImageRef;
use async_trait::async_trait;
use colored::Colorize;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::io::Write;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// `image inspect` がイメージ不在のときに出すメッセージ（docker / podman / nerdctl）
const MISSING_IMAGE_MARKERS: [&str; 3] = ["no such image", "no such object", "image not known"];

/// CLI を呼び出すエンジン
#[derive(Debug, Clone)]
pub struct CliEngine {
    program: String,
    echo: bool,
}

impl CliEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            echo: false,
        }
    }

    /// 実行するコマンドラインを stdout に表示する
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// コマンドを実行して終了を待つ
    ///
    /// `stdin` が指定された場合はパイプで渡して閉じる。それ以外は stdin を閉じた状態で起動する。
    async fn run(&self, step: Step, args: Vec<OsString>, stdin: Option<&[u8]>) -> BuildResult<()> {
        if self.echo {
            println!(
                "  {} {} {}",
                "→".blue(),
                self.program,
                args.iter()
                    .map(|a| a.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
                    .dimmed()
            );
        }
        tracing::debug!(program = %self.program, %step, "Running engine command");

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = cmd.spawn().map_err(|source| BuildError::EngineUnavailable {
            program: self.program.clone(),
            source,
        })?;

        if let (Some(secret), Some(mut pipe)) = (stdin, child.stdin.take()) {
            // エンジンが先に終了した場合の書き込み失敗は終了コードで判断する
            if let Err(e) = pipe.write_all(secret).await {
                tracing::debug!(%step, "Failed to write to engine stdin: {}", e.kind());
            }
            drop(pipe);
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(BuildError::ToolFailed {
                step,
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}

impl Default for CliEngine {
    fn default() -> Self {
        Self::new("docker")
    }
}

#[async_trait]
impl ContainerEngine for CliEngine {
    fn name(&self) -> &str {
        &self.program
    }

    async fn build(&self, context: &Path, recipe: &Path, image: &ImageRef) -> BuildResult<()> {
        let args = vec![
            OsString::from("build"),
            OsString::from("-t"),
            OsString::from(image.to_string()),
            OsString::from("-f"),
            recipe.as_os_str().to_owned(),
            context.as_os_str().to_owned(),
        ];
        self.run(Step::Build, args, None).await
    }

    async fn login(
        &self,
        registry: &str,
        username: &str,
        credential: &Credential,
    ) -> BuildResult<()> {
        // シークレットはコマンドライン引数に載せず stdin で渡す
        let args = vec![
            OsString::from("login"),
            OsString::from(registry),
            OsString::from("--username"),
            OsString::from(username),
            OsString::from("--password-stdin"),
        ];
        self.run(Step::Login, args, Some(credential.expose_secret()))
            .await
    }

    async fn tag(&self, source: &ImageRef, target: &ImageRef) -> BuildResult<()> {
        let args = vec![
            OsString::from("tag"),
            OsString::from(source.to_string()),
            OsString::from(target.to_string()),
        ];
        self.run(Step::Tag, args, None).await
    }

    async fn push(&self, image: &ImageRef) -> BuildResult<()> {
        let args = vec![OsString::from("push"), OsString::from(image.to_string())];
        self.run(Step::Push, args, None).await
    }

    async fn image_id(&self, image: &ImageRef) -> BuildResult<Option<String>> {
        let output = Command::new(&self.program)
            .args(["image", "inspect", "--format", "{{.Id}}"])
            .arg(image.to_string())
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| BuildError::EngineUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            if is_missing_image(&output.stderr) {
                tracing::debug!("{} not found in local image store", image);
                return Ok(None);
            }

            // イメージ不在以外の失敗はエンジンのメッセージをそのまま流す
            let _ = std::io::stderr().write_all(&output.stderr);
            return Err(BuildError::ToolFailed {
                step: Step::Inspect,
                program: self.program.clone(),
                code: output.status.code(),
            });
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!id.is_empty()).then_some(id))
    }
}

/// `image inspect` の stderr がイメージ不在を示しているか
fn is_missing_image(stderr: &[u8]) -> bool {
    let message = String::from_utf8_lossy(stderr).to_lowercase();
    MISSING_IMAGE_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_messages() {
        assert!(is_missing_image(
            b"Error: No such image: mcp-azure-devops:latest\n"
        ));
        assert!(is_missing_image(
            b"Error response from daemon: No such object: mcp-azure-devops:latest\n"
        ));
        assert!(is_missing_image(
            b"Error: inspecting object: mcp-azure-devops:latest: image not known\n"
        ));
        assert!(is_missing_image(
            b"FATA[0000] 1 errors:\nno such image: mcp-azure-devops:latest\n"
        ));
    }

    #[test]
    fn test_other_failures_are_not_missing_image() {
        assert!(!is_missing_image(b""));
        assert!(!is_missing_image(
            b"Cannot connect to the Docker daemon at unix:///var/run/docker.sock. Is the docker daemon running?\n"
        ));
        assert!(!is_missing_image(b"permission denied while trying to connect\n"));
    }

    #[cfg(unix)]
    fn image() -> ImageRef {
        ImageRef::new("mcp-azure-devops", "latest").unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_exit() {
        let engine = CliEngine::new("true");
        let result = engine
            .build(Path::new("."), Path::new("Dockerfile"), &image())
            .await;
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_exit_code_is_kept() {
        let engine = CliEngine::new("false");
        let result = engine.push(&image()).await;
        match result {
            Err(BuildError::ToolFailed { step, code, .. }) => {
                assert_eq!(step, Step::Push);
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_program() {
        let engine = CliEngine::new("shipflow-engine-that-does-not-exist");
        let result = engine.tag(&image(), &image()).await;
        assert!(matches!(result, Err(BuildError::EngineUnavailable { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_login_with_engine_ignoring_stdin() {
        // `true` は stdin を読まずに終了するが、失敗扱いにはしない
        let engine = CliEngine::new("true");
        let credential = Credential::from_bytes(vec![b'x'; 1 << 20]);
        let result = engine.login("ghcr.io", "movesny", &credential).await;
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_image_id_failure_without_message_is_error() {
        let engine = CliEngine::new("false");
        match engine.image_id(&image()).await {
            Err(BuildError::ToolFailed { step, code, .. }) => {
                assert_eq!(step, Step::Inspect);
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected ToolFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_image_id_empty_output() {
        let engine = CliEngine::new("true");
        assert_eq!(engine.image_id(&image()).await.unwrap(), None);
    }
}
