use classic_collections::linked_list::DoublyLinkedList;
use classic_collections::queue::Queue;
use classic_collections::stack::Stack;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

const NUM_OF_OPERATIONS: u32 = 10_000;

fn bench_vecdeque(c: &mut Criterion) {
    c.bench_function("bench vecdeque push pop", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..NUM_OF_OPERATIONS {
                deque.push_back(i);
            }
            while let Some(value) = deque.pop_front() {
                black_box(value);
            }
        })
    });
}

fn bench_stack(c: &mut Criterion) {
    c.bench_function("bench stack push pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..NUM_OF_OPERATIONS {
                stack.push(i);
            }
            while let Some(value) = stack.pop() {
                black_box(value);
            }
        })
    });
}

fn bench_queue(c: &mut Criterion) {
    c.bench_function("bench queue enqueue dequeue", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..NUM_OF_OPERATIONS {
                queue.enqueue(i);
            }
            while let Some(value) = queue.dequeue() {
                black_box(value);
            }
        })
    });
}

fn bench_doubly_linked_list(c: &mut Criterion) {
    c.bench_function("bench doubly linked list push pop", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..NUM_OF_OPERATIONS {
                list.push_back(i);
            }
            while let Some(value) = list.pop_front() {
                black_box(value);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_vecdeque,
    bench_stack,
    bench_queue,
    bench_doubly_linked_list,
);
criterion_main!(benches);
