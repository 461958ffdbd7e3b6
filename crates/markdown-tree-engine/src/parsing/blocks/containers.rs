use super::types::{ContainerFrame, RawBlock, RawItem};

#[derive(Debug)]
struct OpenContainer {
    frame: ContainerFrame,
    blocks: Vec<RawBlock>,
    items: Vec<RawItem>,
}

/// The open container path, outermost first, as an index-addressed stack.
///
/// Each open container accumulates its finished children. Closing the top
/// container folds it into its parent: an item into its list, a list or
/// quote into the enclosing container's blocks (or the document).
#[derive(Debug, Default)]
pub struct ContainerStack {
    root: Vec<RawBlock>,
    open: Vec<OpenContainer>,
}

impl ContainerStack {
    /// Number of open containers.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn frame(&self, index: usize) -> Option<&ContainerFrame> {
        self.open.get(index).map(|c| &c.frame)
    }

    fn top(&self) -> Option<&ContainerFrame> {
        self.open.last().map(|c| &c.frame)
    }

    /// Number of open quotes and items.
    pub fn nesting(&self) -> usize {
        self.open.iter().filter(|c| c.frame.nests()).count()
    }

    /// A list is dangling when it is on top with no open item: the next
    /// line either starts a new item in it or ends it.
    pub fn dangling_list(&self) -> Option<&ContainerFrame> {
        self.top()
            .filter(|f| matches!(f, ContainerFrame::List { .. }))
    }

    pub fn close_dangling_list(&mut self) {
        if self.dangling_list().is_some() {
            self.close_top();
        }
    }

    pub fn push(&mut self, frame: ContainerFrame) {
        self.open.push(OpenContainer {
            frame,
            blocks: Vec::new(),
            items: Vec::new(),
        });
    }

    /// Appends a finished block to the innermost open container.
    pub fn emit(&mut self, block: RawBlock) {
        self.close_dangling_list();
        self.sink().push(block);
    }

    pub fn close_top(&mut self) {
        let Some(closed) = self.open.pop() else {
            return;
        };
        match closed.frame {
            ContainerFrame::Item { .. } => {
                let item = RawItem {
                    parts: closed.blocks,
                };
                match self.open.last_mut() {
                    Some(parent) if matches!(parent.frame, ContainerFrame::List { .. }) => {
                        parent.items.push(item)
                    }
                    _ => self.sink().extend(item.parts),
                }
            }
            ContainerFrame::List { start, .. } => {
                if !closed.items.is_empty() {
                    self.sink().push(RawBlock::List {
                        start,
                        items: closed.items,
                    });
                }
            }
            ContainerFrame::Quote => self.sink().push(RawBlock::Quote {
                parts: closed.blocks,
            }),
        }
    }

    /// Closes containers until only `depth` remain open.
    pub fn truncate(&mut self, depth: usize) {
        while self.open.len() > depth {
            self.close_top();
        }
    }

    pub fn finish(mut self) -> Vec<RawBlock> {
        self.truncate(0);
        self.root
    }

    fn sink(&mut self) -> &mut Vec<RawBlock> {
        match self.open.last_mut() {
            Some(top) => &mut top.blocks,
            None => &mut self.root,
        }
    }
}
