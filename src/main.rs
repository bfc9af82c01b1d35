use anyhow::{Context, Result, anyhow};
use forward_list::{ForwardList, TryClone};
use log::info;

fn basics() -> Result<()> {
    let mut list = ForwardList::new();

    list.push_front(3);
    list.push_front(2);
    list.push_front(1);
    list.push_back(4);

    println!("list: {}", list);
    println!("len: {}", list.len());

    for item in &mut list {
        *item *= 10;
    }
    println!("scaled: {}", list);

    let popped = list
        .pop_front()
        .ok_or_else(|| anyhow!("list unexpectedly empty"))?;
    println!("popped {popped}, left {}", list);

    let from_vec = ForwardList::from(vec![5, 6, 7]);
    println!("from vec: {}", from_vec);
    Ok(())
}

fn positions() -> Result<()> {
    let mut list = ForwardList::from(vec![1, 2, 3, 4]);

    let inserted = list
        .try_insert_after(list.before_begin(), 0)
        .context("inserting at the front")?;
    info!("inserted {} at the front", list[inserted]);

    let mut pos = list.cbegin();
    pos.advance(&list).advance(&list);
    let next = list.erase_after(pos);
    println!("erased after the third element: {}", list);
    if let Some(value) = list.get(next) {
        println!("now following it: {value}");
    }

    let copy = list.try_clone().context("copying the list")?;
    println!("copy == list: {}", copy == list);

    let mut other = ForwardList::from(vec![9, 9]);
    forward_list::swap(&mut list, &mut other);
    println!("after swap: {} / {}", list, other);
    println!("{} < {}: {}", list, other, list < other);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    basics()?;
    positions()?;
    Ok(())
}
