use crate::store::Inventory;

pub fn print_menu() {
    println!();
    println!("Menu");
    println!("  [l] Load inventory from file");
    println!("  [a] Add a CD");
    println!("  [i] Display current inventory");
    println!("  [d] Delete a CD from the inventory");
    println!("  [s] Save inventory to file");
    println!("  [x] Exit");
    println!();
}

pub fn show_inventory(inventory: &Inventory) {
    println!("======== Current Inventory ========");
    if inventory.is_empty() {
        println!("No CDs in the inventory");
    } else {
        for record in inventory.records() {
            println!("{} | {} (by: {})", record.id, record.title, record.artist);
        }
    }
    println!("===================================");
}
