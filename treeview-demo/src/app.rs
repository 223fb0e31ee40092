//! Event loop hosting the tree.

use std::collections::VecDeque;
use std::io;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info};
use tokio::sync::mpsc;
use treeview::{Command, Event, Key, KeyCombo, Message, TreeConfig, TreeItem, TreeView};

use crate::mock;
use crate::terminal::TerminalGuard;

/// Run until the user quits.
pub async fn run(config: TreeConfig) -> io::Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let (mut tree, initial) = mock::tree(config);
    run_commands(&mut tree, &tx, initial);
    terminal.draw(&tree.view())?;

    info!("Event loop started");
    loop {
        let message = tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => {
                    let Some(event) = Event::from_crossterm(event) else {
                        continue;
                    };
                    if is_quit(&event) {
                        break;
                    }
                    Message::Input(event)
                }
                Some(Err(e)) => {
                    error!("Event stream error: {}", e);
                    continue;
                }
                None => break,
            },
            Some(message) = rx.recv() => message,
        };

        let commands = tree.update(message);
        run_commands(&mut tree, &tx, commands);
        terminal.draw(&tree.view())?;
    }

    info!("Event loop finished");
    Ok(())
}

fn is_quit(event: &Event) -> bool {
    const QUIT: [KeyCombo; 2] = [KeyCombo::char('q'), KeyCombo::char('c').ctrl()];
    event.key().is_some_and(|combo| QUIT.contains(combo))
}

/// Run the commands returned by `update`.
///
/// Dispatched messages are fed back in order before the loop waits again,
/// so tree replacements get their generations in the order they were issued.
/// Rebuilds run as tasks and send their result back through `tx`.
fn run_commands<T>(
    tree: &mut TreeView<T>,
    tx: &mpsc::UnboundedSender<Message<T>>,
    commands: Vec<Command<T>>,
) where
    T: TreeItem + Send + 'static,
    T::Key: Send + 'static,
{
    let mut queue = VecDeque::from(commands);
    while let Some(command) = queue.pop_front() {
        match command {
            Command::Dispatch(message) => queue.extend(tree.update(message)),
            rebuild @ Command::Rebuild(_) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    match rebuild.run().await {
                        Ok(message) => {
                            if tx.send(message).is_err() {
                                debug!("Event loop gone, dropping rebuild result");
                            }
                        }
                        Err(e) => error!("Command failed: {}", e),
                    }
                });
            }
        }
    }
}
