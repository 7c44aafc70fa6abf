use crate::router::RouteTable;

/// Print the route table, one entry per line.
pub fn execute() {
    for entry in RouteTable::app().routes() {
        println!("{entry}");
    }
}
