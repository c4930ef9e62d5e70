fn main() {
    reservas_frontend::start();
}
