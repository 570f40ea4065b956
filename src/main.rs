fn main() {
    if let Err(err) = flextree_svg::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
