fn main() {
    negamax_chess::uci::run_uci_loop();
}
