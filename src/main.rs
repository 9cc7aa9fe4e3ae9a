use iced_pager::app::{self, Flags};
use iced_pager::media;
use iced_pager::ui::toolbar::Idiom;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let title: Option<String> = args.opt_value_from_str("--title").unwrap_or(None);
    let idiom = args
        .opt_value_from_str::<_, String>("--idiom")
        .unwrap_or(None)
        .and_then(|value| Idiom::parse(&value));

    let mut photos = Vec::new();
    for arg in args.finish() {
        let Ok(arg) = arg.into_string() else {
            continue;
        };
        let path = PathBuf::from(arg);
        if path.is_dir() {
            match media::expand_directory(&path) {
                Ok(mut found) => photos.append(&mut found),
                Err(e) => eprintln!("Skipping {}: {e}", path.display()),
            }
        } else {
            photos.push(path);
        }
    }

    app::run(Flags {
        title,
        photos,
        idiom,
    })
}
