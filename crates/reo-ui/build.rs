fn main() {
    slint_build::compile("ui/window.slint").expect("failed to compile ui/window.slint");
}
