//! Quiz Master UI entry point (built with `trunk`).

fn main() {
    quizmaster_ui::start();
}
