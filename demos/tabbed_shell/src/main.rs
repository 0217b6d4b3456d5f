use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use tabnav_router::*;

const INBOX: ViewId = view_id!("inbox");
const MESSAGE: ViewId = view_id!("message");
const SETTINGS: ViewId = view_id!("settings");
const CONFIRM: ViewId = view_id!("confirm");

/// Stands in for a window: logs repaints instead of drawing.
struct ConsoleHost;

impl RenderHost for ConsoleHost {
    fn invalidate(&self) {
        log::debug!("repaint requested");
    }

    fn set_title(&self, title: &str) {
        println!("[title] {title}");
    }
}

fn register_screens(vm: &ViewManager) -> anyhow::Result<()> {
    vm.register(INBOX, || simple(INBOX, "Inbox", |_| Ok(())))?;
    vm.register(SETTINGS, || simple(SETTINGS, "Settings", |_| Ok(())))?;
    vm.register(MESSAGE, || {
        simple(MESSAGE, "Message", |intent| {
            let id = intent
                .params
                .get_str("id")
                .ok_or_else(|| anyhow::anyhow!("message id missing"))?;
            println!("opening message {id}");
            Ok(())
        })
    })?;
    vm.register(CONFIRM, || {
        simple(CONFIRM, "Confirm", |intent| {
            let reply = intent
                .params
                .get::<Sender<bool>>("reply")
                .ok_or_else(|| anyhow::anyhow!("confirm dialog needs a reply channel"))?;
            reply.send(true)?;
            Ok(())
        })
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let vm = Arc::new(ViewManager::new(Arc::new(ConsoleHost)));
    register_screens(&vm)?;

    vm.request_switch(Intent::new(INBOX))?;
    vm.request_switch(
        Intent::new(MESSAGE)
            .with_param("id", 42)
            .with_referer(INBOX.location()),
    )?;
    vm.request_switch(Intent::new(SETTINGS))?;
    // Already on top of the second tab, so this only switches back to it.
    vm.request_switch(Intent::new(SETTINGS))?;

    if let Err(err) = vm.request_switch(Intent::new(MESSAGE)) {
        log::warn!("{:#}", anyhow::Error::from(err));
    }

    let (tx, rx) = mpsc::channel();
    vm.request_switch(
        Intent::new(CONFIRM)
            .with_opaque_param("reply", tx)
            .modal(),
    )?;
    println!("confirmed: {}", rx.recv()?);
    vm.finish_modal_view();

    let worker = {
        let vm = vm.clone();
        thread::spawn(move || {
            vm.request_switch(
                Intent::new(MESSAGE)
                    .with_param("id", 7)
                    .in_new_tab(),
            )
        })
    };
    worker
        .join()
        .map_err(|_| anyhow::anyhow!("navigation thread panicked"))??;

    if let Some(view) = vm.current_view() {
        println!("showing {} at {:?}", view.title(), view.location().map(Location::as_str));
    }
    while vm.has_prev() {
        let _ = vm.nav_back();
    }

    println!("{}", vm.snapshot().to_json_pretty());
    Ok(())
}
