use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use client_logging::client_debug;
use crawler_api::ClientSettings;
use crawler_core::{update, AppState, Msg};

use crate::effects::EffectRunner;
use crate::input::{parse_line, Command};
use crate::render::render;

/// Drives the message loop: user commands and client completions both become
/// core messages; a render happens whenever the state marks itself dirty.
pub fn run(settings: ClientSettings) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, settings);
    let line_rx = spawn_stdin_reader()?;

    let mut state = AppState::new();
    print_help();

    loop {
        // One user command per iteration; the timeout keeps client
        // completions flowing while the user is idle.
        match line_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(line) => match parse_line(&line) {
                Command::Quit => break,
                Command::Help => print_help(),
                Command::List => print!("{}", render(&state.view())),
                Command::Unknown(text) => {
                    if !text.is_empty() {
                        println!("unrecognized command: {text} (try `help`)");
                    }
                }
                Command::Search(url) => {
                    state = dispatch(state, Msg::QueryChanged(url), &runner);
                    state = dispatch(state, Msg::SearchSubmitted, &runner);
                }
                Command::Filter(amount) => {
                    state = dispatch(state, Msg::ThresholdChanged(amount), &runner);
                }
                Command::Email(address) => {
                    state = dispatch(state, Msg::EmailChanged(address), &runner);
                }
                Command::Report => {
                    state = dispatch(state, Msg::ReportSubmitted, &runner);
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        // Completions from the background client.
        while let Ok(msg) = msg_rx.try_recv() {
            client_debug!("client msg: {msg:?}");
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            print!("{}", render(&state.view()));
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn spawn_stdin_reader() -> anyhow::Result<mpsc::Receiver<String>> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawn stdin reader")?;
    Ok(line_rx)
}

fn print_help() {
    println!("Job Crawler");
    println!("  search <url>     submit a URL to the scraping backend");
    println!("  filter <amount>  hide postings below this salary");
    println!("  email <address>  set the report recipient");
    println!("  report           email a report of the visible postings");
    println!("  list             show the current postings");
    println!("  quit             exit");
}
