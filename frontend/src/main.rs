fn main() {
    staffhub_frontend::boot();
}
