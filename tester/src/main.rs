//! End-to-end driver: feeds a scripted interaction through the widget core
//! against a running options service and prints each render.
//!
//! ```sh
//! cargo run -p server &
//! cargo run -p tester -- --server http://localhost:3000
//! ```

use anyhow::Result;
use clap::Parser;

use widget::{
    DEFAULT_BULK_TAG, Effect, SelectEvent, SelectState, ViewModel, client::OptionsClient, render,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the options service
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let client = OptionsClient::new(&args.server);
    let mut state = SelectState::new(DEFAULT_BULK_TAG);

    println!("-- open dropdown");
    drive(&mut state, SelectEvent::InputClicked, &client).await;
    print_view(&render(&state));

    println!("-- type \"i\"");
    drive(&mut state, SelectEvent::QueryChanged("i".into()), &client).await;
    print_view(&render(&state));

    if let Some(first) = state.options().first().map(|option| option.value.clone()) {
        println!("-- click first option ({first})");
        drive(&mut state, SelectEvent::OptionToggled(first), &client).await;
        print_view(&render(&state));
    }

    println!("-- clear filter, check bulk box");
    drive(&mut state, SelectEvent::QueryChanged(String::new()), &client).await;
    drive(&mut state, SelectEvent::BulkToggled(true), &client).await;
    print_view(&render(&state));

    println!("-- backspace on empty input");
    drive(&mut state, SelectEvent::BackspacePressed, &client).await;
    print_view(&render(&state));

    let selected: Vec<String> = state.selected_values().map(str::to_string).collect();
    println!("-- submit {selected:?}");
    let ack = client.submit(&selected).await?;
    println!("Server replied: {ack}");

    Ok(())
}

/// Applies one event and executes every emitted effect, feeding fetch
/// completions straight back into the reducer.
async fn drive(state: &mut SelectState, event: SelectEvent, client: &OptionsClient) {
    for effect in state.update(event) {
        match effect {
            Effect::FetchOptions { token, query } => {
                let follow_up = match client.fetch_options(&query).await {
                    Ok(options) => SelectEvent::OptionsLoaded { token, options },
                    Err(e) => {
                        eprintln!("Error fetching options: {e}");
                        SelectEvent::FetchFailed { token }
                    }
                };

                state.update(follow_up);
            }
            Effect::FocusInput => {}
        }
    }
}

fn print_view(view: &ViewModel) {
    let tags: Vec<&str> = view.tags.iter().map(|tag| tag.label.as_str()).collect();
    println!(
        "tags: {tags:?}{}",
        view.placeholder.map(|p| format!(" ({p})")).unwrap_or_default()
    );

    if !view.dropdown_open {
        println!("dropdown: closed");
        return;
    }

    for row in &view.rows {
        let marker = if row.selected { "x" } else { " " };
        println!("[{marker}] {} ({})", row.label, row.value);
    }
}
