use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

pub struct Source<T> {
    callbacks: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Source<T> {
    pub fn new() -> Self {
        Self {
            callbacks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Runs every registered callback, in registration order, on the item.
    pub fn emit(&self, item: T) {
        let callbacks = self.callbacks.borrow();
        for callback in callbacks.iter() {
            callback(&item);
        }
    }

    pub fn to_stream(&self) -> Stream<T> {
        Stream {
            callbacks: self.callbacks.clone(),
        }
    }
}

pub struct Stream<T> {
    callbacks: Rc<RefCell<Vec<Callback<T>>>>,
}

impl<T> Stream<T> {
    // Registers a stage on this stream and hands back the stream it feeds.
    // `forward` decides what, if anything, reaches the downstream callbacks.
    fn derive<U, F>(&self, forward: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T, &dyn Fn(&U)) + 'static,
    {
        let downstream = Rc::new(RefCell::new(Vec::<Callback<U>>::new()));
        let downstream_clone = downstream.clone();

        self.callbacks.borrow_mut().push(Rc::new(move |item: &T| {
            forward(item, &|out: &U| {
                for callback in downstream_clone.borrow().iter() {
                    callback(out);
                }
            });
        }));

        Stream {
            callbacks: downstream,
        }
    }

    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.derive(move |item: &T, emit: &dyn Fn(&U)| emit(&f(item)))
    }

    pub fn tap<F>(&self, f: F) -> Stream<T>
    where
        T: 'static,
        F: Fn(&T) + 'static,
    {
        self.derive(move |item: &T, emit: &dyn Fn(&T)| {
            f(item);
            emit(item);
        })
    }

    pub fn sink<F>(&self, f: F)
    where
        F: Fn(&T) + 'static,
    {
        self.callbacks
            .borrow_mut()
            .push(Rc::new(move |item: &T| f(item)));
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Stream {
            callbacks: self.callbacks.clone(),
        }
    }
}
