use std::collections::{BTreeSet, HashSet};

/// Pairs every page with the other side of its sheet, so that a color page
/// pulls its whole sheet into the color print run.
///
/// Page numbers are 1-based; 0 is ignored.
pub fn double_side(pagelist: &[usize]) -> Vec<usize> {
    let mut printlist = BTreeSet::new();
    for &page in pagelist.iter().filter(|&&p| p > 0) {
        if page % 2 == 0 {
            printlist.insert(page - 1);
            printlist.insert(page);
        } else {
            printlist.insert(page);
            printlist.insert(page + 1);
        }
    }
    printlist.into_iter().collect()
}

/// Every page in `1..=n` that is not in `pagelist`.
pub fn complement(pagelist: &[usize], n: usize) -> Vec<usize> {
    let excluded: HashSet<usize> = pagelist.iter().copied().collect();
    (1..=n).filter(|page| !excluded.contains(page)).collect()
}

/// Compacts page numbers into a print-dialog range string such as
/// `2-14,19,21,22`.
pub fn ranges(printlist: &[usize]) -> String {
    let pages: BTreeSet<usize> = printlist.iter().copied().collect();

    let mut runs: Vec<(usize, usize)> = Vec::new();
    for page in pages {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == page => *end = page,
            _ => runs.push((page, page)),
        }
    }

    runs.into_iter()
        .map(|(start, end)| match end - start {
            0 => start.to_string(),
            1 => format!("{},{}", start, end),
            _ => format!("{}-{}", start, end),
        })
        .collect::<Vec<_>>()
        .join(",")
}

pub fn full_string(printlist: &[usize]) -> String {
    printlist
        .iter()
        .map(|page| page.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
