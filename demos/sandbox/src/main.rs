use pixel_ngin::scenes::SceneKind;

/// `sandbox [showcase|shapes|player]`, defaults to the showcase.
fn main() -> anyhow::Result<()> {
    let kind = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => SceneKind::Showcase,
    };
    log::debug!("starting {kind:?}");
    pixel_ngin::flow::run(kind.constructors())
}
