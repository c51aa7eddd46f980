//! 启动示例数据
//!
//! 开发与演示环境的初始数据集。金额字段满足账单不变式
//! (subtotal = Σ 行金额, total = subtotal + tax)。

use chrono::{DateTime, Duration, Utc};

use shared::models::{
    Booking, BookingStatus, Customer, CustomerStatus, Invoice, InvoiceItem, InvoiceStatus, Room,
    RoomStatus, Service, ServiceStatus, User, UserRole, UserStatus,
};

use crate::store::{EntityStore, IdGen, Stores};

fn room(
    now: DateTime<Utc>,
    room_id: i64,
    room_num: &str,
    room_type: &str,
    price: f64,
    status: RoomStatus,
    description: &str,
) -> Room {
    Room {
        room_id,
        room_num: room_num.to_string(),
        room_type: room_type.to_string(),
        price,
        status,
        description: description.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn booking(
    now: DateTime<Utc>,
    booking_id: i64,
    customer_id: i64,
    room_id: i64,
    check_in_days: i64,
    check_out_days: i64,
    total_price: f64,
    status: BookingStatus,
) -> Booking {
    Booking {
        booking_id,
        customer_id,
        room_id,
        check_in_date: now + Duration::days(check_in_days),
        check_out_date: now + Duration::days(check_out_days),
        total_price,
        status,
        created_at: now,
        updated_at: now,
    }
}

fn customer(
    now: DateTime<Utc>,
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    status: CustomerStatus,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: Some(address.to_string()),
        status,
        created_at: now,
        updated_at: now,
    }
}

fn user(
    now: DateTime<Utc>,
    id: &str,
    username: &str,
    role: UserRole,
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: format!("{}@hotel.com", username),
        password: "hashed_password_here".to_string(),
        role,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
        status: UserStatus::Active,
        last_login: now,
        created_at: now,
        updated_at: now,
    }
}

fn service(
    now: DateTime<Utc>,
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    status: ServiceStatus,
) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        status,
        image_url: None,
        created_at: now,
        updated_at: now,
    }
}

fn item(service_id: &str, service_name: &str, quantity: i64, price: f64) -> InvoiceItem {
    InvoiceItem {
        service_id: service_id.to_string(),
        service_name: service_name.to_string(),
        quantity,
        price,
        total: crate::billing::line_total(quantity, price),
    }
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    now: DateTime<Utc>,
    id: &str,
    customer_id: &str,
    customer_name: &str,
    items: Vec<InvoiceItem>,
    tax: f64,
    status: InvoiceStatus,
    payment_method: Option<&str>,
    notes: &str,
) -> Invoice {
    let totals = crate::billing::totals(&items, tax);
    Invoice {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        items,
        subtotal: totals.subtotal,
        tax,
        total: totals.total,
        status,
        payment_method: payment_method.map(str::to_string),
        notes: Some(notes.to_string()),
        created_at: now,
        updated_at: now,
    }
}

/// 加载示例数据的存储集合
pub async fn seeded_stores() -> Stores {
    let now = shared::util::now();

    let rooms = vec![
        room(now, 101, "101A", "Single", 50.0, RoomStatus::Available, "Single room with a view."),
        room(now, 102, "102B", "Double", 75.0, RoomStatus::Booked, "Double room near the elevator."),
    ];

    let bookings = vec![
        booking(now, 1, 1, 101, 1, 2, 100.0, BookingStatus::Confirmed),
        booking(now, 2, 2, 102, 3, 4, 150.0, BookingStatus::Pending),
        booking(now, 3, 3, 201, -1, 1, 300.0, BookingStatus::CheckedIn),
        booking(now, 4, 4, 202, -2, -1, 160.0, BookingStatus::Completed),
        booking(now, 5, 5, 301, 5, 6, 110.0, BookingStatus::Cancelled),
    ];

    let customers = vec![
        customer(now, "1", "John Doe", "john.doe@example.com", "+1234567890", "123 Main St, City", CustomerStatus::Active),
        customer(now, "2", "Jane Smith", "jane.smith@example.com", "+1987654321", "456 Oak Ave, Town", CustomerStatus::Active),
        customer(now, "3", "Robert Johnson", "robert.j@example.com", "+1122334455", "789 Pine Rd, Village", CustomerStatus::Inactive),
        customer(now, "4", "Maria Garcia", "maria.g@example.com", "+5544332211", "321 Elm St, Borough", CustomerStatus::Active),
        customer(now, "5", "David Wilson", "david.w@example.com", "+6677889900", "654 Maple Dr, District", CustomerStatus::Active),
    ];

    let users = vec![
        user(now, "1", "admin", UserRole::Admin, "Admin", "User", "+1234567890"),
        user(now, "2", "receptionist", UserRole::Receptionist, "John", "Smith", "+1987654321"),
        user(now, "3", "housekeeper", UserRole::Housekeeper, "Maria", "Garcia", "+1122334455"),
        user(now, "4", "manager", UserRole::Manager, "David", "Wilson", "+5544332211"),
        user(now, "5", "maintenance", UserRole::Maintenance, "Robert", "Johnson", "+6677889900"),
    ];

    let services = vec![
        service(now, "1", "Room Service", "24/7 food and beverage delivery to your room", 15.0, "food", ServiceStatus::Available),
        service(now, "2", "Laundry Service", "Same-day laundry and dry cleaning service", 25.0, "housekeeping", ServiceStatus::Available),
        service(now, "3", "Airport Transfer", "Private car service to and from the airport", 50.0, "transportation", ServiceStatus::Available),
        service(now, "4", "Spa Treatment", "Relaxing massage and spa treatments", 80.0, "wellness", ServiceStatus::Unavailable),
        service(now, "5", "Tour Guide", "Professional local tour guide service", 100.0, "activities", ServiceStatus::Available),
    ];

    let invoices = vec![
        invoice(
            now, "1", "1", "John Doe",
            vec![item("1", "Room Service", 2, 15.0), item("2", "Laundry Service", 1, 25.0)],
            5.5, InvoiceStatus::Paid, Some("credit_card"), "Room 101",
        ),
        invoice(
            now, "2", "2", "Jane Smith",
            vec![item("3", "Airport Transfer", 1, 50.0)],
            5.0, InvoiceStatus::Pending, Some("bank_transfer"), "Room 102",
        ),
        invoice(
            now, "3", "3", "Mike Johnson",
            vec![item("4", "Spa Treatment", 2, 80.0), item("5", "Tour Guide", 1, 100.0)],
            26.0, InvoiceStatus::Paid, Some("cash"), "Room 201",
        ),
        invoice(
            now, "4", "4", "Sarah Wilson",
            vec![item("1", "Room Service", 3, 15.0)],
            4.5, InvoiceStatus::Cancelled, None, "Room 202",
        ),
        invoice(
            now, "5", "5", "David Brown",
            vec![item("2", "Laundry Service", 2, 25.0)],
            5.0, InvoiceStatus::Pending, Some("credit_card"), "Room 301",
        ),
    ];

    Stores {
        rooms: EntityStore::with_initial(rooms),
        bookings: EntityStore::with_initial(bookings),
        customers: EntityStore::with_initial(customers),
        users: EntityStore::with_initial(users),
        services: EntityStore::with_initial(services),
        invoices: EntityStore::with_initial(invoices),
        service_usage: EntityStore::new(),
        // 新生成的数字主键不与示例数据冲突
        room_ids: IdGen::starting_at(1000),
        booking_ids: IdGen::starting_at(1000),
        usage_ids: IdGen::starting_at(1),
    }
}
