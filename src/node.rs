use std::ptr;

/// One entry of the list: an item plus its forward-pointer tower.
///
/// A node allocated with height `h` participates in levels `0..h`; its
/// `forward_` vector has exactly `h` slots. `backward_` is meaningful at
/// level 0 only. The header sentinel is the single node whose `item_` is
/// `None`; it spans the full height cap and is never linked backward.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) item_: Option<T>,
    pub(crate) forward_: Vec<*mut Node<T>>,
    pub(crate) backward_: *mut Node<T>,
}

impl<T> Node<T> {
    pub(crate) fn allocate(item: T, height: usize) -> *mut Node<T> {
        Box::into_raw(Box::new(Node {
            item_: Some(item),
            forward_: vec![ptr::null_mut(); height],
            backward_: ptr::null_mut(),
        }))
    }

    pub(crate) fn allocate_head(max_height: usize) -> *mut Node<T> {
        Box::into_raw(Box::new(Node {
            item_: None,
            forward_: vec![ptr::null_mut(); max_height],
            backward_: ptr::null_mut(),
        }))
    }

    pub(crate) fn free(node_ptr: *mut Node<T>) {
        drop(unsafe { Box::from_raw(node_ptr) });
    }

    pub(crate) fn from_raw<'a>(node_ptr: *mut Node<T>) -> Option<&'a Node<T>> {
        if node_ptr.is_null() {
            None
        } else {
            unsafe { Some(&*node_ptr) }
        }
    }

    pub(crate) fn from_raw_mut<'a>(node_ptr: *mut Node<T>) -> Option<&'a mut Node<T>> {
        if node_ptr.is_null() {
            None
        } else {
            unsafe { Some(&mut *node_ptr) }
        }
    }

    /// Number of levels this node participates in.
    pub(crate) fn height(&self) -> usize {
        self.forward_.len()
    }

    /// The item, for nodes other than the header sentinel.
    pub(crate) fn item(&self) -> &T {
        self.item_.as_ref().unwrap()
    }
}
