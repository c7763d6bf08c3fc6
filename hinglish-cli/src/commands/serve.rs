//! Serve command implementation

use anyhow::Result;
use clap::Args;
use hinglish_api::AppState;

use super::{block_on, RunContext};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (default: [server] addr, 0.0.0.0:8000)
    #[arg(long, value_name = "HOST:PORT")]
    pub addr: Option<String>,

    /// Longest text accepted per request
    #[arg(long, value_name = "CHARS")]
    pub max_text_chars: Option<usize>,
}

impl ServeArgs {
    /// Address the server binds
    pub fn bind_addr(&self, ctx: &RunContext) -> String {
        self.addr
            .clone()
            .unwrap_or_else(|| ctx.config.server.addr.clone())
    }

    /// Execute the serve command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let pipeline = ctx.config.build_pipeline()?;
        let max_text_chars = self
            .max_text_chars
            .unwrap_or(ctx.config.server.max_text_chars);
        let state = AppState::new(pipeline).with_max_text_chars(max_text_chars);

        let addr = self.bind_addr(ctx);
        log::info!("Serving on http://{}", addr);
        block_on(hinglish_api::run(&addr, state))??;
        Ok(())
    }
}
