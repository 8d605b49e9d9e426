//! Interactive session: each input line is a selection-changed event.
//!
//! Views are computed on the blocking pool and handed back to the session
//! loop over a channel. When selections overlap, only results newer than
//! what is already on screen get rendered.

use crate::show::render;
use crate::OutputFormat;
use log::{debug, error, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use trade_core::Dataset;
use trade_dashboard::render::render_commodity_list;
use trade_dashboard::{compute_views, Dashboard, DashboardViews, Notice, ViewObserver};

/// Capacity of the channel carrying computed views back to the session.
const VIEWS_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Select(&'a str),
    List,
    Quit,
    Blank,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Blank,
        ":list" => Input::List,
        ":quit" | ":q" => Input::Quit,
        commodity => Input::Select(commodity),
    }
}

/// Prints rendered views and notices to stdout.
struct ConsoleObserver {
    format: OutputFormat,
}

impl ViewObserver for ConsoleObserver {
    fn views_changed(&mut self, views: &DashboardViews) {
        match render(views, self.format) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to render views for '{}': {}", views.commodity, e),
        }
    }

    fn notice(&mut self, notice: &Notice) {
        println!("Notice: {}", notice);
    }
}

/// Run an interactive session on stdin.
pub async fn run_interactive(dataset: Arc<Dataset>, format: OutputFormat) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(dataset);
    dashboard.subscribe(Box::new(ConsoleObserver { format }));
    print!("{}", render_commodity_list(dashboard.index()));
    println!("Enter a commodity (:list to show options, :quit to exit)");
    run_session(&mut dashboard, BufReader::new(tokio::io::stdin())).await
}

/// Drive `dashboard` from line-oriented `input` until EOF or `:quit`.
///
/// The default commodity is selected first. Lines that are not valid UTF-8
/// are skipped. In-flight computations are drained before returning, even
/// when reading `input` fails.
pub async fn run_session<R>(dashboard: &mut Dashboard, input: R) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let (tx, mut rx) = mpsc::channel::<DashboardViews>(VIEWS_CHANNEL_CAPACITY);

    if let Some(default) = dashboard.index().default_commodity().map(str::to_string) {
        dispatch(dashboard, &default, &tx);
    }

    let mut segments = input.split(b'\n');
    let mut read_error = None;
    loop {
        tokio::select! {
            segment = segments.next_segment() => {
                let bytes = match segment {
                    Ok(Some(bytes)) => bytes,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        read_error = Some(e);
                        break;
                    }
                };
                let line = match String::from_utf8(bytes) {
                    Ok(line) => line,
                    Err(e) => {
                        warn!("Skipping input line that is not valid UTF-8: {}", e);
                        continue;
                    }
                };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::List => print!("{}", render_commodity_list(dashboard.index())),
                    Input::Blank => {}
                    Input::Select(commodity) => dispatch(dashboard, commodity, &tx),
                }
            }
            Some(views) = rx.recv() => {
                dashboard.complete(views);
            }
        }
    }

    // Spawned tasks hold the remaining senders; recv ends once they finish.
    drop(tx);
    while let Some(views) = rx.recv().await {
        dashboard.complete(views);
    }
    if let Some(e) = read_error {
        return Err(e.into());
    }
    Ok(())
}

fn dispatch(dashboard: &mut Dashboard, commodity: &str, tx: &mpsc::Sender<DashboardViews>) {
    // Rejected selections are already reported to observers by `begin`.
    let event = match dashboard.begin(commodity) {
        Ok(event) => event,
        Err(_) => return,
    };
    let dataset = dashboard.dataset();
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let views = compute_views(&dataset, &event);
        if tx.blocking_send(views).is_err() {
            debug!("Session closed before views #{} were delivered", event.seq);
        }
    });
}
