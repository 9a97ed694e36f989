use std::collections::HashSet;

use super::cell_ref::CellRef;
use super::sheet::Sheet;

/// Detect circular dependencies starting from a cell.
/// Returns Some(cycle_path) if a cycle is reachable, None otherwise.
pub fn detect_cycle(start: CellRef, sheet: &Sheet) -> Option<Vec<CellRef>> {
    let mut visiting = HashSet::new();
    let mut path = Vec::new();

    if detect_cycle_dfs(start, sheet, &mut visiting, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn detect_cycle_dfs(
    current: CellRef,
    sheet: &Sheet,
    visiting: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    if visiting.contains(&current) {
        path.push(current);
        return true;
    }

    let deps = match sheet.get(current) {
        Some(cell) => cell.depends_on().to_vec(),
        None => return false,
    };

    visiting.insert(current);
    path.push(current);

    for dep in deps {
        if detect_cycle_dfs(dep, sheet, visiting, path) {
            return true;
        }
    }

    path.pop();
    visiting.remove(&current);
    false
}
